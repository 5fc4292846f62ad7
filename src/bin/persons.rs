//! Persons Binary
//!
//! Extracts person names from the demo documents through the recognizer
//! seam, using the dictionary-backed [`Lexicon`] in place of an external
//! model pipeline.

use centroids::*;

const DOCUMENTS: [(&str, &str); 3] = [
    (
        "doc_1",
        "Alice Johnson met Bob Smith in Paris and later emailed Charlie Brown.",
    ),
    (
        "doc_2",
        "Dr. Emily Zhang spoke with Michael Jordan before the conference.",
    ),
    (
        "doc_3",
        "The report was authored by Priya Kapoor and reviewed by Alex Li.",
    ),
];

fn main() {
    log();
    let recognizer = Lexicon::new([
        "Alice Johnson",
        "Bob Smith",
        "Charlie Brown",
        "Emily Zhang",
        "Michael Jordan",
        "Priya Kapoor",
        "Alex Li",
    ]);
    for (id, names) in person_names(&DOCUMENTS, &recognizer) {
        match names.is_empty() {
            true => println!("{}: No person names found", id),
            false => println!("{}: {}", id, names.join(", ")),
        }
    }
}
