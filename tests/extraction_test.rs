//! End-to-end pipeline tests against the public API, using a scripted
//! driver that stands in for a live automation session.

use std::collections::HashMap;
use std::time::Duration;

use feedsift::{scan, DriverError, DriverResult, FeedDriver, FeedPhase, Options};

/// One scripted feed item.
#[derive(Default, Clone)]
struct Post {
    /// Query -> served text.
    texts: HashMap<&'static str, &'static str>,
    links: Vec<&'static str>,
    /// Every sub-element access on this post fails.
    poisoned: bool,
}

/// Scripted driver. The extent grows by one per `request_more` for the
/// first `growth_steps` calls, then stays flat.
#[derive(Default)]
struct ScriptedFeed {
    posts: Vec<Post>,
    growth_steps: u64,
    steps: u64,
}

impl ScriptedFeed {
    fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    fn post(&self, index: usize) -> DriverResult<&Post> {
        let post = self
            .posts
            .get(index)
            .ok_or_else(|| DriverError::new("post out of range"))?;
        if post.poisoned {
            return Err(DriverError::new("post detached from the document"));
        }
        Ok(post)
    }
}

impl FeedDriver for ScriptedFeed {
    type Node = usize;

    fn content_nodes(&self) -> DriverResult<Vec<usize>> {
        Ok((0..self.posts.len()).collect())
    }

    fn node_text(
        &self,
        node: &usize,
        query: &str,
        _timeout: Duration,
    ) -> DriverResult<Option<String>> {
        Ok(self.post(*node)?.texts.get(query).map(|text| (*text).to_string()))
    }

    fn expand_controls(&self, node: &usize, _query: &str) -> DriverResult<usize> {
        self.post(*node).map(|_| 0)
    }

    fn click_expand(
        &self,
        node: &usize,
        _query: &str,
        _index: usize,
        _timeout: Duration,
    ) -> DriverResult<()> {
        self.post(*node).map(|_| ())
    }

    fn link_targets(&self, node: &usize) -> DriverResult<Vec<String>> {
        Ok(self
            .post(*node)?
            .links
            .iter()
            .map(|link| (*link).to_string())
            .collect())
    }

    fn content_extent(&self) -> DriverResult<u64> {
        Ok(self.steps.min(self.growth_steps))
    }

    fn request_more(&mut self) -> DriverResult<()> {
        self.steps += 1;
        Ok(())
    }

    fn raw_document(&self) -> DriverResult<String> {
        Ok("<html></html>".to_string())
    }
}

fn fast_options() -> Options {
    Options {
        render_grace: Duration::ZERO,
        settle_delay: Duration::ZERO,
        ..Options::default()
    }
}

#[test]
fn records_carry_resolved_and_derived_fields() {
    let mut feed = ScriptedFeed::with_posts(vec![Post {
        texts: [
            ("span.feed-shared-actor__name", "Meera Iyer"),
            (
                "div.update-components-text",
                "Empanelment drive is live. Write to meera.iyer@vendors.co.in \
                 or call +91 98450 12345. Chennai preferred. …more",
            ),
        ]
        .into_iter()
        .collect(),
        links: vec!["/in/meera-iyer/", "/feed/update/urn:li:activity:77/"],
        ..Post::default()
    }]);

    let report = scan(&mut feed, &fast_options());
    assert_eq!(report.nodes_seen, 1);

    let record = &report.records[0];
    assert_eq!(record.name, "Meera Iyer");
    assert_eq!(record.email, "meera.iyer@vendors.co.in");
    assert_eq!(record.phone_number, "+919845012345");
    assert_eq!(record.location, "Chennai");
    assert_eq!(record.url, "/feed/update/urn:li:activity:77/");
    assert!(record.text.ends_with("Chennai preferred."));
    assert!(!record.text.contains('\n'));
}

#[test]
fn unmatched_author_becomes_an_empty_name() {
    let mut feed = ScriptedFeed::with_posts(vec![Post {
        texts: [("p", "a body with no actor markup")].into_iter().collect(),
        ..Post::default()
    }]);

    let report = scan(&mut feed, &fast_options());
    assert_eq!(report.records[0].name, "");
    assert_eq!(report.records[0].text, "a body with no actor markup");
}

#[test]
fn a_post_whose_sub_queries_all_raise_is_skipped() {
    let mut feed = ScriptedFeed::with_posts(vec![
        Post {
            texts: [("p", "first survives")].into_iter().collect(),
            ..Post::default()
        },
        Post {
            poisoned: true,
            ..Post::default()
        },
        Post {
            texts: [("p", "third survives")].into_iter().collect(),
            ..Post::default()
        },
    ]);

    let report = scan(&mut feed, &fast_options());
    assert_eq!(report.nodes_seen, 3);
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.nodes_skipped(), 1);
    assert_eq!(report.records[0].text, "first survives");
    assert_eq!(report.records[1].text, "third survives");
    assert!(report.warnings.iter().any(|w| w.contains("node 2/3")));
}

#[test]
fn traversal_settles_once_growth_stops() {
    let mut feed = ScriptedFeed {
        posts: Vec::new(),
        growth_steps: 3,
        steps: 0,
    };
    let report = scan(&mut feed, &fast_options());
    assert_eq!(report.phase, FeedPhase::Settled);
    // Three growing steps, then one more that observes no growth.
    assert_eq!(feed.steps, 4);
}

#[test]
fn traversal_exhausts_at_the_iteration_cap_on_endless_feeds() {
    let mut feed = ScriptedFeed {
        posts: Vec::new(),
        growth_steps: u64::MAX,
        steps: 0,
    };
    let options = Options {
        max_load_iterations: 12,
        ..fast_options()
    };
    let report = scan(&mut feed, &options);
    assert_eq!(report.phase, FeedPhase::Exhausted);
    assert_eq!(feed.steps, 12);
}

#[test]
fn base_url_resolves_relative_permalinks() {
    let mut feed = ScriptedFeed::with_posts(vec![Post {
        texts: [("p", "body text here")].into_iter().collect(),
        links: vec!["/posts/announcement/"],
        ..Post::default()
    }]);
    let options = Options {
        base_url: Some("https://feeds.example.com".to_string()),
        ..fast_options()
    };

    let report = scan(&mut feed, &options);
    assert_eq!(
        report.records[0].url,
        "https://feeds.example.com/posts/announcement/"
    );
}

#[test]
fn custom_gazetteer_replaces_the_builtin_table() {
    let mut feed = ScriptedFeed::with_posts(vec![Post {
        texts: [("p", "meet us in tallinn, not in mumbai")].into_iter().collect(),
        ..Post::default()
    }]);
    let options = Options {
        gazetteer: Some(vec!["Tallinn".to_string()]),
        ..fast_options()
    };

    let report = scan(&mut feed, &options);
    assert_eq!(report.records[0].location, "Tallinn");
}
