use std::fs;
use std::path::PathBuf;

use libris_core::{Book, BookUpdate, Library, LibraryError, Repository};
use libris_store::JsonFileRepository;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn setup() -> (JsonFileRepository, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(temp_dir.path().join("books_data.json"));
    (repo, temp_dir)
}

#[test]
fn test_loads_existing_indented_file() {
    let repo = JsonFileRepository::new(fixtures_dir().join("books_data.json"));

    let books = repo.load().unwrap();

    assert_eq!(books.len(), 3);
    assert_eq!(books[0].title, "Dune");
    assert!(books[1].read);
    assert_eq!(books[2].title, "Café Stories");
    assert_eq!(books[2].publication_year, "circa 1900");
}

#[test]
fn test_malformed_file_is_reported_by_repository() {
    let (repo, _dir) = setup();
    fs::write(repo.path(), "{ not json").unwrap();

    assert!(matches!(
        repo.load(),
        Err(LibraryError::StoreMalformed { .. })
    ));
}

#[test]
fn test_wrong_shape_is_malformed() {
    let (repo, _dir) = setup();
    fs::write(repo.path(), r#"{"title": "Dune"}"#).unwrap();

    assert!(matches!(
        repo.load(),
        Err(LibraryError::StoreMalformed { .. })
    ));
}

#[test]
fn test_library_opens_empty_on_malformed_file() {
    let (repo, _dir) = setup();
    fs::write(repo.path(), "[{\"title\": 42}]").unwrap();

    let library = Library::open(repo);

    assert!(library.list().is_empty());
}

#[test]
fn test_library_opens_empty_on_missing_file() {
    let (repo, _dir) = setup();

    let library = Library::open(repo.clone());

    assert!(library.list().is_empty());
    assert!(!repo.path().exists(), "opening must not create the file");
}

#[test]
fn test_library_opens_empty_on_unreadable_path() {
    let temp_dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(temp_dir.path());

    assert!(matches!(repo.load(), Err(LibraryError::Io { .. })));

    let library = Library::open(repo);

    assert!(library.list().is_empty());
}

#[test]
fn test_every_mutation_is_on_disk() {
    let (repo, _dir) = setup();
    let mut library = Library::open(repo.clone());

    library
        .add(Book::new("Dune", "Herbert", "1965", "Sci-Fi", false))
        .unwrap();
    assert_eq!(repo.load().unwrap().len(), 1);

    library
        .update("dune", BookUpdate::read_only(true).with_genre("Classic"))
        .unwrap();
    let on_disk = repo.load().unwrap();
    assert_eq!(on_disk[0].genre, "Classic");
    assert!(on_disk[0].read);

    library.remove("DUNE").unwrap();
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn test_save_overwrites_previous_content() {
    let (repo, _dir) = setup();
    let long: Vec<Book> = (0..5)
        .map(|i| Book::new(format!("Book {i}"), "A", "2000", "G", false))
        .collect();
    repo.save(&long).unwrap();

    repo.save(&long[..1]).unwrap();

    assert_eq!(repo.load().unwrap(), long[..1].to_vec());
    let text = fs::read_to_string(repo.path()).unwrap();
    assert!(!text.contains("Book 4"));
}

#[test]
fn test_close_writes_final_state() {
    let (repo, _dir) = setup();
    fs::write(repo.path(), "[]").unwrap();

    let library = Library::open(repo.clone());
    library.close().unwrap();

    assert_eq!(fs::read_to_string(repo.path()).unwrap(), "[]");
}
