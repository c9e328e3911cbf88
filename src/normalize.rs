// src/normalize.rs
//! Row → [`PersonRecord`].
//!
//! Each column is judged on its own. A bad link or a broken picture only
//! costs that one field (plus a diagnostic); a missing name costs the row.
//!
//! Picture handling order matters:
//! 1. derive the cache name from the URL string,
//! 2. if that file already exists, use it tentatively,
//! 3. try a fresh fetch; on success overwrite and keep,
//! 4. on failure keep whatever step 2 found.

use tracing::debug;

use crate::core::links;
use crate::error::NormalizeError;
use crate::picture::ImageSource;
use crate::record::{Diagnostic, DiagnosticKind, PersonRecord, RawRow, SOCIAL_COLUMNS};
use crate::store::{content_address, ImageCache};

/// Shared, read-only collaborators for normalizing rows.
#[derive(Clone, Copy)]
pub struct NormalizeCtx<'a> {
    pub cache: &'a ImageCache,
    pub images: &'a dyn ImageSource,
}

/// A record that made it, plus whatever went wrong along the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized {
    pub record: PersonRecord,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn normalize(
    row: &RawRow,
    ordinal: usize,
    ctx: NormalizeCtx<'_>,
) -> Result<Normalized, NormalizeError> {
    let name = row.field("name");
    if name.is_empty() {
        return Err(NormalizeError::NameMissing);
    }

    let mut diagnostics = Vec::new();
    let mut record = PersonRecord {
        name: s!(name),
        bio: s!(row.field("bio")),
        ..Default::default()
    };

    record.link = checked_url(row, "link", ordinal, &mut diagnostics).map(|u| u.to_lowercase());

    for platform in SOCIAL_COLUMNS {
        let url = checked_url(row, platform, ordinal, &mut diagnostics);
        if let (Some(url), Some(slot)) = (url, record.socials.slot_mut(platform)) {
            *slot = Some(url.to_lowercase());
        }
    }

    if let Some(url) = checked_url(row, "image", ordinal, &mut diagnostics) {
        record.image = resolve_image(url, ordinal, ctx, &mut diagnostics);
    }

    Ok(Normalized { record, diagnostics })
}

/// Trimmed value of `column` when it is a valid URL. Empty is fine and
/// silent; anything else that fails validation is reported.
fn checked_url<'r>(
    row: &'r RawRow,
    column: &'static str,
    ordinal: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<&'r str> {
    let value = row.field(column);
    if links::is_valid_url(value) {
        return Some(value);
    }
    if !value.is_empty() {
        diagnostics.push(Diagnostic::new(ordinal, DiagnosticKind::InvalidUrl { field: column }));
    }
    None
}

fn resolve_image(
    url: &str,
    ordinal: usize,
    ctx: NormalizeCtx<'_>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<String> {
    let file_name = content_address(url);

    let mut image = None;
    if ctx.cache.contains(&file_name) {
        debug!("R{ordinal}: cached picture {file_name} on hand");
        image = Some(file_name.clone());
    }

    match ctx.images.canonicalize(url) {
        Ok(picture) => match ctx.cache.store(&file_name, &picture) {
            Ok(path) => {
                debug!("R{ordinal}: stored {}", path.display());
                image = Some(file_name);
            }
            Err(e) => {
                debug!("R{ordinal}: {e}");
                diagnostics.push(Diagnostic::new(ordinal, DiagnosticKind::ImageStore { url: s!(url) }));
            }
        },
        Err(e) => {
            debug!("R{ordinal}: {e}");
            diagnostics.push(Diagnostic::new(
                ordinal,
                DiagnosticKind::Image { failure: e.failure(), url: s!(url) },
            ));
        }
    }

    image
}
