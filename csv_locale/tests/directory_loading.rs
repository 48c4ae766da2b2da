//! Loading catalogues from translation directories.

use anyhow::{Result, anyhow, ensure};
use csv_locale::{LocaleError, PluralCategory, load_directory};
use rstest::rstest;
use test_helpers::TranslationDir;

#[rstest]
fn loads_only_well_named_files() -> Result<()> {
    let dir = TranslationDir::new()?
        .with_file("tr_TR.csv", "Hello,Merhaba\n")?
        .with_file("es.csv", "Hello,Hola\n")?
        .with_file("common_es_GT.csv", "Hello,Quiubo\n")?
        .with_file("EN.csv", "Hello,Howdy\n")?
        .with_file(".gitkeep", "")?;
    std::fs::create_dir(dir.path().join("fr_FR.csv"))?;

    let catalog = load_directory(dir.path()).map_err(|e| anyhow!(e.to_string()))?;
    let locales: Vec<_> = catalog.supported_locales().collect();
    ensure!(locales == ["es", "tr_TR"], "unexpected locales {locales:?}");
    Ok(())
}

#[cfg(target_os = "linux")]
#[rstest]
fn non_utf8_file_names_are_skipped() -> Result<()> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TranslationDir::new()?.with_file("tr_TR.csv", "Hello,Merhaba\n")?;
    let bad_name = OsStr::from_bytes(b"bad\xff.csv");
    std::fs::write(dir.path().as_std_path().join(bad_name), "Hello,Hallo\n")?;

    let catalog = load_directory(dir.path()).map_err(|e| anyhow!(e.to_string()))?;
    let locales: Vec<_> = catalog.supported_locales().collect();
    ensure!(locales == ["tr_TR"], "unexpected locales {locales:?}");
    ensure!(
        catalog
            .table_or_empty("tr_TR")
            .lookup(PluralCategory::Unknown, "Hello")
            == Some("Merhaba")
    );
    Ok(())
}

#[rstest]
fn spaced_quoted_rows_load_cleanly() -> Result<()> {
    let dir = TranslationDir::new()?.with_file(
        "tr_TR.csv",
        "\"Hello\", \"Merhaba\"\n\"Bye\", \"Hoşçakal\", \"singular\"\n",
    )?;
    let catalog = load_directory(dir.path()).map_err(|e| anyhow!(e.to_string()))?;
    let table = catalog.table_or_empty("tr_TR");
    ensure!(table.lookup(PluralCategory::Unknown, "Hello") == Some("Merhaba"));
    ensure!(table.lookup(PluralCategory::Singular, "Bye") == Some("Hoşçakal"));
    Ok(())
}

#[rstest]
fn files_sharing_a_stem_merge() -> Result<()> {
    let dir = TranslationDir::new()?
        .with_file("tr_TR.csv", "Hello,Merhaba\n")?
        .with_file("tr_TR.txt", "Goodbye,Hoşça kal\n")?;

    let catalog = load_directory(dir.path()).map_err(|e| anyhow!(e.to_string()))?;
    let table = catalog.table_or_empty("tr_TR");
    ensure!(catalog.len() == 1);
    ensure!(table.lookup(PluralCategory::Unknown, "Hello") == Some("Merhaba"));
    ensure!(table.lookup(PluralCategory::Unknown, "Goodbye") == Some("Hoşça kal"));
    Ok(())
}

#[rstest]
fn bad_rows_do_not_stop_loading() -> Result<()> {
    let dir = TranslationDir::new()?.with_file(
        "fr_FR.csv",
        "1 item,1 article,singular\n\
         %(num)s items,%(num)s articles,several\n\
         orphan\n\
         \n\
         Hello , Bonjour \n",
    )?;

    let catalog = load_directory(dir.path()).map_err(|e| anyhow!(e.to_string()))?;
    let table = catalog.table_or_empty("fr_FR");
    ensure!(table.len() == 2, "unexpected table {table:?}");
    ensure!(table.lookup(PluralCategory::Singular, "1 item") == Some("1 article"));
    ensure!(table.lookup(PluralCategory::Unknown, "Hello") == Some("Bonjour"));
    ensure!(table.category(PluralCategory::Plural).is_none());
    Ok(())
}

#[rstest]
fn empty_files_still_register_their_locale() -> Result<()> {
    let dir = TranslationDir::new()?.with_file("pt.csv", "")?;
    let catalog = load_directory(dir.path()).map_err(|e| anyhow!(e.to_string()))?;
    ensure!(catalog.supports("pt"));
    ensure!(catalog.table_or_empty("pt").is_empty());
    Ok(())
}

#[rstest]
fn missing_directory_is_reported() -> Result<()> {
    let dir = TranslationDir::new()?;
    let missing = dir.path().join("absent");
    let err = load_directory(&missing).expect_err("missing directory must fail");
    match &*err {
        LocaleError::Directory { path, .. } => ensure!(*path == missing, "wrong path {path}"),
        other => return Err(anyhow!("unexpected error {other:?}")),
    }
    Ok(())
}
