//! Changelog normalization: raw per-revision change groups in, one flat
//! chronological event timeline out.

use crate::core::{parse_timestamp, ChangeEvent, FieldKind};
use crate::errors::Result;
use crate::source::Changelog;

/// Flatten a raw changelog into ascending-by-timestamp [`ChangeEvent`]s,
/// keeping only status and assignee changes.
///
/// The sort is stable, so events sharing a timestamp keep their original
/// revision order. Revisions that contain no tracked fields are skipped
/// without looking at their timestamps; a revision that does carry a tracked
/// field must have a parsable timestamp.
pub fn normalize_changelog(changelog: &Changelog) -> Result<Vec<ChangeEvent>> {
    let mut events = Vec::new();

    for group in &changelog.histories {
        if !group
            .items
            .iter()
            .any(|item| FieldKind::parse(&item.field).is_some())
        {
            continue;
        }

        let occurred_at = parse_timestamp(&group.created)?;
        let author_id = group.author.as_ref().and_then(|a| a.account_id.clone());

        for item in &group.items {
            let Some(field) = FieldKind::parse(&item.field) else {
                continue;
            };
            events.push(ChangeEvent {
                field,
                from: item.from.clone(),
                to: item.to.clone().unwrap_or_default(),
                occurred_at,
                author_id: author_id.clone(),
            });
        }
    }

    events.sort_by_key(|event| event.occurred_at);
    Ok(events)
}
