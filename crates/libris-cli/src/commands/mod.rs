pub mod book;
pub mod shell;

pub(crate) fn added_message(title: &str) -> String {
    format!("Book \"{}\" added to the collection.", title)
}

pub(crate) fn removed_message(title: &str) -> String {
    format!("Book \"{}\" removed from the collection.", title)
}

pub(crate) fn not_in_collection_message(title: &str) -> String {
    format!("Book \"{}\" not found in the collection.", title)
}
