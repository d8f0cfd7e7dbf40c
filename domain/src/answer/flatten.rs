//! Result flattening: nested answer → ordered display records.

use super::raw::{RawAnswer, RawPod};
use crate::record::Record;

/// Flatten an answer into one [`Record`] per non-error pod.
///
/// Records come out in the service's pod order. A record's content is the
/// concatenation of every plain-text element across the pod's subpods, in
/// subpod order then element order, with no separator. Other element kinds
/// contribute nothing. This function is pure.
pub fn flatten(answer: &RawAnswer) -> Vec<Record> {
    answer
        .pods
        .iter()
        .filter(|pod| !pod.is_error)
        .map(flatten_pod)
        .collect()
}

fn flatten_pod(pod: &RawPod) -> Record {
    let content: String = pod
        .subpods
        .iter()
        .flat_map(|subpod| subpod.contents.iter())
        .filter_map(|element| element.as_plain_text())
        .collect();

    Record::new(pod.title.clone(), content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::raw::{ContentElement, RawSubpod};

    fn text_pod(title: &str, texts: &[&str]) -> RawPod {
        RawPod::new(
            title,
            vec![RawSubpod::new(
                texts.iter().map(|t| ContentElement::plain_text(*t)).collect(),
            )],
        )
    }

    #[test]
    fn test_error_pods_are_skipped() {
        let mut pod = text_pod("X", &["should not appear"]);
        pod.is_error = true;
        let answer = RawAnswer::success(vec![pod]);

        assert!(flatten(&answer).is_empty());
    }

    #[test]
    fn test_non_plain_text_is_dropped() {
        let answer = RawAnswer::success(vec![RawPod::new(
            "Plot",
            vec![RawSubpod::new(vec![ContentElement::image(
                "https://example.com/plot.gif",
            )])],
        )]);

        assert_eq!(flatten(&answer), vec![Record::new("Plot", "")]);
    }

    #[test]
    fn test_concatenation_has_no_separator() {
        let answer = RawAnswer::success(vec![text_pod("Result", &["A", "B"])]);
        assert_eq!(flatten(&answer)[0].content, "AB");
    }

    #[test]
    fn test_concatenates_across_subpods_in_order() {
        let pod = RawPod::new(
            "Roots",
            vec![
                RawSubpod::new(vec![
                    ContentElement::plain_text("x = -2"),
                    ContentElement::Other {
                        kind: "mathml".to_string(),
                    },
                ]),
                RawSubpod::new(vec![]),
                RawSubpod::new(vec![ContentElement::plain_text("x = 2")]),
            ],
        );
        let answer = RawAnswer::success(vec![pod]);

        assert_eq!(flatten(&answer)[0].content, "x = -2x = 2");
    }

    #[test]
    fn test_preserves_pod_order() {
        let answer = RawAnswer::success(vec![
            text_pod("P1", &["one"]),
            RawPod::failed("broken"),
            text_pod("P2", &["two"]),
        ]);

        let titles: Vec<_> = flatten(&answer).into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["P1", "P2"]);
    }

    #[test]
    fn test_pod_without_subpods_yields_empty_content() {
        let answer = RawAnswer::success(vec![RawPod::new("Input", vec![])]);
        assert_eq!(flatten(&answer), vec![Record::new("Input", "")]);
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let answer = RawAnswer::success(vec![
            text_pod("Input", &["2+2"]),
            text_pod("Result", &["4"]),
        ]);
        assert_eq!(flatten(&answer), flatten(&answer));
    }
}
