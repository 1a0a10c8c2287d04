//! Signature grouping, representative selection and merging

use std::cmp::Ordering;
use std::collections::HashMap;

use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::signature::signature;
use crate::domain::entities::{Group, MergedItem, PlatformId, Post};

/// Create a deterministic UUID from a string
fn deterministic_uuid(input: &str) -> Uuid {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&result[..16]);
    Uuid::from_bytes(bytes)
}

/// Partition posts by signature.
///
/// Groups come out in the order their signature was first seen; sources keep
/// their input order.
pub fn group_posts(posts: &[Post]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for post in posts {
        let key = signature(post);
        match index_by_key.get(&key).copied() {
            Some(index) => groups[index].sources.push(post.clone()),
            None => {
                index_by_key.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    sources: vec![post.clone()],
                });
            }
        }
    }

    groups
}

/// Ordering where the better representative compares as `Greater`
fn representative_rank(a: &Post, b: &Post) -> Ordering {
    a.engagement()
        .cmp(&b.engagement())
        .then_with(|| a.created_at.cmp(&b.created_at))
}

/// Index of the best post: highest engagement, then most recent.
/// Remaining ties go to the earliest source. `None` for an empty slice.
fn representative_index(sources: &[Post]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, post) in sources.iter().enumerate() {
        match best {
            Some(current) if representative_rank(post, &sources[current]) != Ordering::Greater => {}
            _ => best = Some(index),
        }
    }
    best
}

/// Pick the post that stands in for a group in flat dedup mode
pub fn select_representative(group: &Group) -> Option<&Post> {
    representative_index(&group.sources).map(|index| &group.sources[index])
}

/// One representative per group, in group order
pub fn dedupe_posts(groups: &[Group]) -> Vec<Post> {
    groups
        .iter()
        .filter_map(select_representative)
        .cloned()
        .collect()
}

/// Build the aggregate view of a group. `None` for a group with no sources.
pub fn merge_group(group: Group) -> Option<MergedItem> {
    let primary_index = representative_index(&group.sources)?;
    let primary = group.sources[primary_index].clone();

    let mut platforms: Vec<PlatformId> = Vec::new();
    for source in &group.sources {
        if !platforms.contains(&source.platform_id) {
            platforms.push(source.platform_id);
        }
    }

    let total_engagement = group
        .sources
        .iter()
        .map(Post::engagement)
        .fold(0u128, u128::saturating_add);
    let latest_created_at = group
        .sources
        .iter()
        .map(|s| s.created_at)
        .max()
        .unwrap_or(primary.created_at);

    Some(MergedItem {
        id: deterministic_uuid(&group.key),
        key: group.key,
        primary,
        primary_index,
        sources: group.sources,
        platforms,
        total_engagement,
        latest_created_at,
    })
}
