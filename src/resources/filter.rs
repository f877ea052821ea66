//! Pure derivations over the loaded resources: filter options and the
//! filtered subset shown in the card grid.

use std::collections::HashSet;
use std::fmt;

use crate::resources::model::CodingResource;

/// Value of one filter control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Sentinel "all": the predicate always holds.
    #[default]
    All,
    /// Keep resources whose tags contain this value.
    Tag(String),
}

impl Selection {
    pub fn tag(value: impl Into<String>) -> Self {
        Self::Tag(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn matches(&self, tags: &[String]) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => tags.iter().any(|t| t == tag),
        }
    }

    /// True when the selection can still be offered for `options`.
    pub fn is_offered(&self, options: &[String]) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => options.iter().any(|o| o == tag),
        }
    }

    /// Step through `All, options[0], .., options[n-1]` with wrap-around.
    ///
    /// A tag that is not among `options` restarts from `All`.
    pub fn cycle(&self, options: &[String], forward: bool) -> Selection {
        // Position 0 is All, position i + 1 is options[i].
        let slots = options.len() + 1;
        let current = match self {
            Self::All => Some(0),
            Self::Tag(tag) => options.iter().position(|o| o == tag).map(|i| i + 1),
        };
        let Some(current) = current else {
            return Selection::All;
        };
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        match next {
            0 => Selection::All,
            i => Selection::Tag(options[i - 1].clone()),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}

/// Distinct topics across all resources, in first-seen order.
pub fn topic_options(resources: &[CodingResource]) -> Vec<String> {
    distinct_tags(resources, |r| r.topics.as_slice())
}

/// Distinct levels across all resources, in first-seen order.
pub fn level_options(resources: &[CodingResource]) -> Vec<String> {
    distinct_tags(resources, |r| r.levels.as_slice())
}

fn distinct_tags<F>(resources: &[CodingResource], tags: F) -> Vec<String>
where
    F: Fn(&CodingResource) -> &[String],
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for tag in resources.iter().flat_map(|r| tags(r).iter()) {
        if seen.insert(tag.as_str()) {
            out.push(tag.clone());
        }
    }
    out
}

/// Resources matching both selections, in their original order.
pub fn filtered<'a>(
    resources: &'a [CodingResource],
    topic: &Selection,
    level: &Selection,
) -> Vec<&'a CodingResource> {
    resources
        .iter()
        .filter(|r| topic.matches(&r.topics) && level.matches(&r.levels))
        .collect()
}

/// Everything the resources view derives from state for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterView<'a> {
    pub topic_options: Vec<String>,
    pub level_options: Vec<String>,
    pub filtered: Vec<&'a CodingResource>,
}

impl<'a> FilterView<'a> {
    pub fn derive(resources: &'a [CodingResource], topic: &Selection, level: &Selection) -> Self {
        Self {
            topic_options: topic_options(resources),
            level_options: level_options(resources),
            filtered: filtered(resources, topic, level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(id: i64, topics: &[&str], levels: &[&str]) -> CodingResource {
        CodingResource {
            id,
            description: format!("R{id}"),
            url: format!("http://r{id}"),
            types: vec!["tutorial".to_string()],
            topics: topics.iter().map(|s| s.to_string()).collect(),
            levels: levels.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn sample() -> Vec<CodingResource> {
        vec![
            resource(1, &["js"], &["beginner"]),
            resource(2, &["css", "html"], &["beginner", "advanced"]),
            resource(3, &["js", "react"], &["advanced"]),
            resource(4, &["python", "python"], &["intermediate"]),
            resource(5, &[], &[]),
        ]
    }

    fn ids(list: &[&CodingResource]) -> Vec<i64> {
        list.iter().map(|r| r.id).collect()
    }

    #[test]
    fn options_are_distinct_in_first_seen_order() {
        let resources = sample();
        assert_eq!(
            topic_options(&resources),
            vec!["js", "css", "html", "react", "python"]
        );
        assert_eq!(
            level_options(&resources),
            vec!["beginner", "advanced", "intermediate"]
        );
    }

    #[test]
    fn options_never_contain_the_all_sentinel() {
        let resources = vec![resource(1, &["all"], &[])];
        // A literal "all" tag from data is a plain option; the sentinel is a separate variant.
        assert_eq!(topic_options(&resources), vec!["all"]);
        assert!(!Selection::tag("all").is_all());
    }

    #[test]
    fn empty_resources_have_no_options() {
        assert!(topic_options(&[]).is_empty());
        assert!(level_options(&[]).is_empty());
        assert!(filtered(&[], &Selection::All, &Selection::All).is_empty());
    }

    #[test]
    fn all_and_all_keeps_everything() {
        let resources = sample();
        let result = filtered(&resources, &Selection::All, &Selection::All);
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn topic_filter_keeps_only_matching_resources() {
        let resources = sample();
        let result = filtered(&resources, &Selection::tag("js"), &Selection::All);
        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[test]
    fn both_predicates_must_hold() {
        let resources = sample();
        let result = filtered(&resources, &Selection::tag("js"), &Selection::tag("advanced"));
        assert_eq!(ids(&result), vec![3]);

        let none = filtered(&resources, &Selection::tag("css"), &Selection::tag("intermediate"));
        assert!(none.is_empty());
    }

    #[test]
    fn every_filtered_item_satisfies_the_selections() {
        let resources = sample();
        let topics = topic_options(&resources);
        let levels = level_options(&resources);
        let mut topic_choices = vec![Selection::All];
        topic_choices.extend(topics.iter().cloned().map(Selection::Tag));
        let mut level_choices = vec![Selection::All];
        level_choices.extend(levels.iter().cloned().map(Selection::Tag));

        for topic in &topic_choices {
            for level in &level_choices {
                let result = filtered(&resources, topic, level);
                for r in &result {
                    assert!(topic.matches(&r.topics));
                    assert!(level.matches(&r.levels));
                }
                let expected = resources
                    .iter()
                    .filter(|r| topic.matches(&r.topics) && level.matches(&r.levels))
                    .count();
                assert_eq!(result.len(), expected);
            }
        }
    }

    #[test]
    fn cycle_walks_all_then_options_and_wraps() {
        let options = vec!["a".to_string(), "b".to_string()];
        let first = Selection::All.cycle(&options, true);
        assert_eq!(first, Selection::tag("a"));
        let second = first.cycle(&options, true);
        assert_eq!(second, Selection::tag("b"));
        assert_eq!(second.cycle(&options, true), Selection::All);
        assert_eq!(Selection::All.cycle(&options, false), Selection::tag("b"));
    }

    #[test]
    fn cycle_with_unknown_tag_restarts_at_all() {
        let options = vec!["a".to_string()];
        assert_eq!(Selection::tag("gone").cycle(&options, true), Selection::All);
        assert_eq!(Selection::All.cycle(&[], true), Selection::All);
    }

    #[test]
    fn filter_view_bundles_derivations() {
        let resources = sample();
        let view = FilterView::derive(&resources, &Selection::All, &Selection::tag("beginner"));
        assert_eq!(view.topic_options.len(), 5);
        assert_eq!(view.level_options.len(), 3);
        assert_eq!(ids(&view.filtered), vec![1, 2]);
    }

    #[test]
    fn display_uses_all_sentinel() {
        assert_eq!(Selection::All.to_string(), "all");
        assert_eq!(Selection::tag("js").to_string(), "js");
    }
}
