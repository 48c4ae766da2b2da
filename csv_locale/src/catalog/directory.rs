//! Loads a catalogue from a directory of per-locale CSV files.

use std::io::Read;
use std::sync::LazyLock;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use csv::{ReaderBuilder, StringRecord, Trim};
use regex::Regex;

use super::{PluralCategory, PluralTable, TranslationCatalog, UnknownPluralIndicator};
use crate::{LocaleError, LocaleResult};

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal exercised by the unit tests"
)]
static LOCALE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(?:_[A-Z]+)?$").expect("locale code pattern is valid"));

/// Returns `true` when `code` is usable as a translation file stem.
///
/// Codes are a lowercase language optionally followed by an underscore and an
/// uppercase region.
///
/// # Examples
///
/// ```
/// use csv_locale::is_locale_code;
///
/// assert!(is_locale_code("tr_TR"));
/// assert!(is_locale_code("es"));
/// assert!(!is_locale_code("common_es_GT"));
/// assert!(!is_locale_code("en-US"));
/// ```
#[must_use]
pub fn is_locale_code(code: &str) -> bool {
    LOCALE_CODE.is_match(code)
}

/// Loads every locale file found directly inside `path`.
///
/// Each regular file's stem names its locale (`tr_TR.csv` → `tr_TR`). Files
/// whose name is not UTF-8 or whose stem is not a locale code are logged and
/// skipped, as are rows with
/// an unrecognised plural indicator. Rows with fewer than two columns are
/// ignored.
///
/// # Examples
///
/// ```rust,no_run
/// use camino::Utf8Path;
/// use csv_locale::{PluralCategory, load_directory};
///
/// # fn run() -> csv_locale::LocaleResult<()> {
/// let catalog = load_directory(Utf8Path::new("translations"))?;
/// let table = catalog.table_or_empty("tr_TR");
/// assert_eq!(table.lookup(PluralCategory::Unknown, "Hello"), Some("Merhaba"));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`LocaleError::Directory`] when the directory cannot be listed and
/// [`LocaleError::File`] when a locale file cannot be opened or decoded.
pub fn load_directory(path: &Utf8Path) -> LocaleResult<TranslationCatalog> {
    let dir = Dir::open_ambient_dir(path, ambient_authority())
        .map_err(|e| LocaleError::directory(path, e).shared())?;
    let mut names = file_names(&dir, path).map_err(|e| LocaleError::directory(path, e).shared())?;
    names.sort_unstable();

    let mut catalog = TranslationCatalog::new();
    for name in names {
        let file_path = path.join(&name);
        let metadata = dir
            .metadata(&name)
            .map_err(|e| LocaleError::file(&file_path, e).shared())?;
        if !metadata.is_file() {
            tracing::debug!(path = %file_path, "skipping non-file entry in translations directory");
            continue;
        }

        let stem = Utf8Path::new(&name).file_stem().unwrap_or(&name);
        if !is_locale_code(stem) {
            tracing::error!(
                locale = stem,
                path = %file_path,
                "unrecognised locale in translation file name"
            );
            continue;
        }

        let file = dir
            .open(&name)
            .map_err(|e| LocaleError::file(&file_path, e).shared())?;
        read_locale_file(catalog.table_mut(stem), file, &file_path)?;
    }

    tracing::info!(
        path = %path,
        locales = catalog.len(),
        "loaded translations from directory"
    );
    Ok(catalog)
}

/// Lists entry names, skipping names that are not valid UTF-8.
fn file_names(dir: &Dir, path: &Utf8Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in dir.entries()? {
        match entry?.file_name() {
            Ok(name) => names.push(name),
            Err(err) => tracing::error!(
                error = %err,
                path = %path,
                "skipping translation file whose name is not UTF-8"
            ),
        }
    }
    Ok(names)
}

#[derive(Clone, Copy)]
enum FieldState {
    Start,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Drops spaces between a delimiter and the start of the next field.
///
/// The `csv` reader only honours a quote that opens a field, so `a, "b"`
/// would otherwise keep its quotes. Whitespace inside quoted fields stays.
fn skip_initial_space(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut state = FieldState::Start;
    for ch in text.chars() {
        state = match (state, ch) {
            (FieldState::Start, ' ' | '\t') => continue,
            (FieldState::Start, '"') | (FieldState::QuoteInQuoted, '"') => FieldState::Quoted,
            (FieldState::Quoted, '"') => FieldState::QuoteInQuoted,
            (FieldState::Quoted, _) => FieldState::Quoted,
            (_, ',' | '\n' | '\r') => FieldState::Start,
            _ => FieldState::Unquoted,
        };
        out.push(ch);
    }
    out
}

fn read_locale_file(
    table: &mut PluralTable,
    mut reader: impl Read,
    path: &Utf8Path,
) -> LocaleResult<()> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| LocaleError::file(path, e).shared())?;
    let text = skip_initial_space(&text);
    let mut rows = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    for record in rows.records() {
        let row = record.map_err(|e| LocaleError::file(path, e).shared())?;
        match parse_row(&row) {
            Some(Ok((category, source, translation))) => {
                table.insert(category, source, translation);
            }
            Some(Err(UnknownPluralIndicator { indicator })) => {
                let line = row.position().map_or(0, csv::Position::line);
                tracing::error!(
                    indicator = %indicator,
                    path = %path,
                    line,
                    "unrecognised plural indicator"
                );
            }
            None => {}
        }
    }
    Ok(())
}

/// Splits a row into its category, source string, and translation.
///
/// Returns `None` for rows with fewer than two columns. A missing or empty
/// third column selects [`PluralCategory::Unknown`].
fn parse_row(
    row: &StringRecord,
) -> Option<Result<(PluralCategory, &str, &str), UnknownPluralIndicator>> {
    let source = row.get(0)?;
    let translation = row.get(1)?;
    let category = match row.get(2) {
        None | Some("") => Ok(PluralCategory::Unknown),
        Some(indicator) => indicator.parse::<PluralCategory>(),
    };
    Some(category.map(|parsed| (parsed, source, translation)))
}
