//! Narrative request formatter.
//!
//! Renders the vacancy fragments and the itinerary instructions into the one
//! text request the external generator receives, and hands back the
//! generator's reply untouched. The instruction template is a versioned file
//! under `src/prompts/`; any wording change gets a new version and a new
//! golden fixture.

use crate::models::VacancyFragment;
use crate::narrative::NarrativeGenerator;

/// Version tag of the embedded instruction template.
pub const TEMPLATE_VERSION: &str = "itinerary-v1";

const ITINERARY_TEMPLATE: &str = include_str!("../prompts/itinerary_v1.txt");

/// Fragments embedded in one request at most.
pub const DEFAULT_FRAGMENT_CAP: usize = 400;

/// Returned instead of calling the generator when there is nothing to ask.
pub const ADVICE_PLACEHOLDER: &str = "Enter Source & Destination for AI Advice.";

/// Returned when the generator call fails for any reason.
pub const ADVICE_FAILURE: &str = "AI Analysis Failed. Check server logs.";

/// Builds generator requests with a bounded fragment payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrativeFormatter {
    fragment_cap: usize,
}

impl Default for NarrativeFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_FRAGMENT_CAP)
    }
}

impl NarrativeFormatter {
    pub fn new(fragment_cap: usize) -> Self {
        Self { fragment_cap }
    }

    pub fn fragment_cap(&self) -> usize {
        self.fragment_cap
    }

    /// The leading `fragment_cap` fragments, in traversal order.
    pub fn truncate<'a>(&self, fragments: &'a [VacancyFragment]) -> &'a [VacancyFragment] {
        &fragments[..fragments.len().min(self.fragment_cap)]
    }

    /// Render the full request text. Pure; no length check on the stations.
    pub fn render_request(
        &self,
        fragments: &[VacancyFragment],
        source: &str,
        destination: &str,
    ) -> String {
        let listing = render_fragment_list(self.truncate(fragments));
        fill_template(
            ITINERARY_TEMPLATE,
            &[
                ("source", source.trim()),
                ("destination", destination.trim()),
                ("fragments", listing.as_str()),
            ],
        )
    }

    /// Ask the generator for an itinerary.
    ///
    /// Never fails: missing stations, or no fragments left after the cap,
    /// short-circuit to [`ADVICE_PLACEHOLDER`] without a call, and generator errors become
    /// [`ADVICE_FAILURE`].
    pub async fn advise(
        &self,
        generator: &dyn NarrativeGenerator,
        fragments: &[VacancyFragment],
        source: &str,
        destination: &str,
    ) -> String {
        let kept = self.truncate(fragments);
        if kept.is_empty() || source.trim().is_empty() || destination.trim().is_empty() {
            return ADVICE_PLACEHOLDER.to_string();
        }

        if fragments.len() > kept.len() {
            log::debug!(
                "Truncating {} fragments to {} for the narrative request",
                fragments.len(),
                self.fragment_cap
            );
        }

        let request = self.render_request(fragments, source, destination);
        match generator.generate(&request).await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Narrative generation via {} failed: {}", generator.model_name(), e);
                ADVICE_FAILURE.to_string()
            }
        }
    }
}

/// `['B3-12 (DDU->CNB)', 'B3-12 (CNB->GAYA)']`
fn render_fragment_list(fragments: &[VacancyFragment]) -> String {
    let items: Vec<String> = fragments.iter().map(|f| quote_item(&f.to_string())).collect();
    format!("[{}]", items.join(", "))
}

/// Quote one list item. Single quotes unless the item contains `'` and no
/// `"`; the chosen quote and backslashes are escaped inside.
fn quote_item(item: &str) -> String {
    let quote = if item.contains('\'') && !item.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(item.len() + 2);
    out.push(quote);
    for c in item.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Single-pass `{name}` substitution; values are never re-scanned.
fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let matched = vars
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));
        match matched {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}
