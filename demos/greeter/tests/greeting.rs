//! Renders the demo page against the bundled translations.

use anyhow::{Result, ensure};
use camino::Utf8PathBuf;
use greeter::app::run;
use greeter::cli::GreeterCli;
use rstest::rstest;

fn cli(accept_language: &str, user_locale: Option<&str>, messages: u64) -> GreeterCli {
    GreeterCli {
        root: Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")),
        accept_language: accept_language.to_owned(),
        user_locale: user_locale.map(str::to_owned),
        name: String::from("Ayşe"),
        messages,
    }
}

#[rstest]
#[case::turkish(
    cli("tr-TR,en;q=0.5", None, 1),
    "[tr_TR] Hoş geldiniz\nMerhaba, Ayşe!\nBir yeni mesajınız var\n"
)]
#[case::french_by_prefix(
    cli("fr-CA;q=0.9, tr;q=0.2", None, 3),
    "[fr_FR] Bienvenue\nBonjour, Ayşe !\nVous avez 3 nouveaux messages\n"
)]
#[case::saved_locale_wins(
    cli("tr", Some("es-GT"), 0),
    "[es_PE] Bienvenido\n¡Hola, Ayşe!\nTiene 0 mensajes nuevos\n"
)]
#[case::unsupported_passes_through(
    cli("de", None, 2),
    "[en_US] Welcome\nHello, Ayşe!\nYou have 2 new messages\n"
)]
fn renders_negotiated_page(#[case] cli: GreeterCli, #[case] expected: &str) -> Result<()> {
    let mut out = Vec::new();
    run(&cli, &mut out)?;
    let page = String::from_utf8(out)?;
    ensure!(page == expected, "unexpected page:\n{page}");
    Ok(())
}
