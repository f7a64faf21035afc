//! Content negotiation.
//!
//! Picks the representation a resource should serve by scoring each offered
//! variant against the client's accepted media types and languages. Scores
//! multiply across axes; a variant that matches no acceptable media range
//! or language is excluded outright. Ties keep the resource's own variant
//! order, so the first offered variant wins among equals.

use mime::Mime;

use crate::data::{ClientInfo, Entity, Language, PreferenceList};

/// Selects the best variant for the given client preferences.
///
/// `fallback_language` rescues variants whose language matches no client
/// preference: such a variant stays acceptable (at reduced score) instead
/// of being excluded. Returns `None` when no offered variant is acceptable.
pub fn preferred_variant(
    variants: Vec<Entity>,
    client_info: &ClientInfo,
    fallback_language: Option<&Language>,
) -> Option<Entity> {
    let mut best: Option<(f32, Entity)> = None;

    for variant in variants {
        let Some(media_score) = media_score(variant.media_type(), client_info.accepted_media_types()) else {
            continue;
        };
        let Some(language_score) =
            language_score(variant.language(), client_info.accepted_languages(), fallback_language)
        else {
            continue;
        };

        let score = media_score * language_score;
        if score <= 0.0 {
            continue;
        }

        match &best {
            Some((best_score, _)) if *best_score >= score => {}
            _ => best = Some((score, variant)),
        }
    }

    best.map(|(_, variant)| variant)
}

/// Scores a variant's media type against the accepted media ranges.
///
/// An untyped variant and an empty preference list are both neutral.
/// Returns `None` when no accepted range covers the type.
fn media_score(media_type: Option<&Mime>, accepted: &PreferenceList<Mime>) -> Option<f32> {
    let Some(media_type) = media_type else {
        return Some(1.0);
    };
    if accepted.is_empty() {
        return Some(1.0);
    }

    accepted
        .iter()
        .filter(|preference| range_includes(preference.value(), media_type))
        .map(|preference| preference.quality())
        .fold(None, |best, quality| Some(best.map_or(quality, |b: f32| b.max(quality))))
}

/// Scores a variant's language against the accepted languages.
///
/// A language-neutral variant and an empty preference list are both
/// neutral. When no preference covers the variant's language, the fallback
/// language keeps it acceptable at half score; otherwise the variant is
/// excluded.
fn language_score(
    language: Option<&Language>,
    accepted: &PreferenceList<Language>,
    fallback: Option<&Language>,
) -> Option<f32> {
    let Some(language) = language else {
        return Some(1.0);
    };
    if accepted.is_empty() {
        return Some(1.0);
    }

    let matched = accepted
        .iter()
        .filter(|preference| preference.value().includes(language))
        .map(|preference| preference.quality())
        .fold(None, |best, quality| Some(best.map_or(quality, |b: f32| b.max(quality))));

    matched.or_else(|| fallback.filter(|fallback| fallback.includes(language)).map(|_| 0.5))
}

/// Returns true when the accepted media range covers the concrete type.
///
/// Parameters are ignored; `*/*` covers everything, `type/*` covers one
/// top-level type.
fn range_includes(range: &Mime, media_type: &Mime) -> bool {
    if range.type_() == mime::STAR {
        return true;
    }
    if range.type_() != media_type.type_() {
        return false;
    }
    range.subtype() == mime::STAR || range.subtype() == media_type.subtype()
}
