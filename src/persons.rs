/// Entity categories surfaced by a recognizer. Only `Person` spans are
/// consumed by [`person_names`]; the rest exist so a collaborator can
/// report everything it found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Location,
    Organization,
    Misc,
}

/// A recognized span of text and its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    span: String,
    kind: EntityKind,
}

impl Entity {
    pub fn new(span: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            span: span.into(),
            kind,
        }
    }
    pub fn span(&self) -> &str {
        &self.span
    }
    pub fn kind(&self) -> EntityKind {
        self.kind
    }
}

/// Seam for the external named-entity-recognition collaborator.
///
/// The collaborator is treated as a black box: given text, it returns the
/// entities it found, in order of appearance. How it does so (model
/// inference, dictionary lookup, a remote service) is not this crate's
/// concern.
pub trait Recognizer {
    fn entities(&self, text: &str) -> Vec<Entity>;
}

/// Collects person spans per document, preserving document order.
///
/// Every document gets an entry, empty when the recognizer found no person
/// entities in it. Span order within a document follows the recognizer's
/// output order.
pub fn person_names<R>(documents: &[(&str, &str)], recognizer: &R) -> Vec<(String, Vec<String>)>
where
    R: Recognizer,
{
    documents
        .iter()
        .map(|(id, text)| {
            let names = recognizer
                .entities(text)
                .into_iter()
                .filter(|e| e.kind() == EntityKind::Person)
                .map(|e| e.span().to_string())
                .collect::<Vec<String>>();
            (id.to_string(), names)
        })
        .collect::<Vec<(String, Vec<String>)>>()
}

/// Dictionary-backed stand-in recognizer.
///
/// Scans text for known spans and reports every occurrence in order of
/// appearance. Used by the demo binary and tests in place of a real model
/// pipeline.
pub struct Lexicon {
    persons: Vec<String>,
}

impl Lexicon {
    pub fn new(persons: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            persons: persons.into_iter().map(Into::into).collect(),
        }
    }
}

impl Recognizer for Lexicon {
    fn entities(&self, text: &str) -> Vec<Entity> {
        let mut found = self
            .persons
            .iter()
            .flat_map(|name| text.match_indices(name.as_str()).map(move |(at, _)| (at, name)))
            .collect::<Vec<(usize, &String)>>();
        found.sort_by_key(|(at, _)| *at);
        found
            .into_iter()
            .map(|(_, name)| Entity::new(name.clone(), EntityKind::Person))
            .collect::<Vec<Entity>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::new([
            "Alice Johnson",
            "Bob Smith",
            "Charlie Brown",
            "Emily Zhang",
            "Michael Jordan",
            "Priya Kapoor",
            "Alex Li",
        ])
    }

    #[test]
    fn collects_persons_per_document() {
        let documents = [
            (
                "doc_1",
                "Alice Johnson met Bob Smith in Paris and later emailed Charlie Brown.",
            ),
            (
                "doc_2",
                "Dr. Emily Zhang spoke with Michael Jordan before the conference.",
            ),
        ];
        let names = person_names(&documents, &lexicon());
        assert_eq!(names[0].0, "doc_1");
        assert_eq!(names[0].1, vec!["Alice Johnson", "Bob Smith", "Charlie Brown"]);
        assert_eq!(names[1].0, "doc_2");
        assert_eq!(names[1].1, vec!["Emily Zhang", "Michael Jordan"]);
    }

    #[test]
    fn documents_without_persons_get_empty_entries() {
        let documents = [("doc_1", "The quarterly report was filed on time.")];
        let names = person_names(&documents, &lexicon());
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].0, "doc_1");
        assert!(names[0].1.is_empty());
    }

    #[test]
    fn document_order_is_preserved_for_unsorted_ids() {
        let documents = [
            ("doc_2", "Priya Kapoor filed the report."),
            ("doc_10", "Alex Li reviewed it."),
            ("doc_1", "Nothing of note here."),
        ];
        let names = person_names(&documents, &lexicon());
        let ids = names.iter().map(|(id, _)| id.as_str()).collect::<Vec<&str>>();
        assert_eq!(ids, vec!["doc_2", "doc_10", "doc_1"]);
    }

    #[test]
    fn repeated_mentions_are_reported_each_time() {
        let text = "Bob Smith opened the case, and Bob Smith closed it.";
        let entities = lexicon().entities(text);
        assert_eq!(entities.len(), 2);
        assert!(entities.iter().all(|e| e.span() == "Bob Smith"));
    }

    #[test]
    fn non_person_entities_are_ignored() {
        struct Mixed;
        impl Recognizer for Mixed {
            fn entities(&self, _: &str) -> Vec<Entity> {
                vec![
                    Entity::new("Paris", EntityKind::Location),
                    Entity::new("Bob Smith", EntityKind::Person),
                    Entity::new("ACME", EntityKind::Organization),
                ]
            }
        }
        let names = person_names(&[("doc_1", "whatever")], &Mixed);
        assert_eq!(names[0].1, vec!["Bob Smith"]);
    }

    #[test]
    fn spans_follow_order_of_appearance() {
        let text = "Charlie Brown wrote first, then Alice Johnson replied.";
        let entities = lexicon().entities(text);
        assert_eq!(entities[0].span(), "Charlie Brown");
        assert_eq!(entities[1].span(), "Alice Johnson");
    }
}
