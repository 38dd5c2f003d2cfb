//! Ingest plain-text files through the offline hash provider, the way the
//! CLI does, and query the result.

use ragstore::config::Config;
use ragstore::infrastructure::ingest::splitter::CharacterTextSplitter;
use ragstore::infrastructure::ingest::text_file::load_text_files;
use ragstore::RagStore;
use std::io::Write;

fn write_file(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(body.as_bytes()).unwrap();
    path
}

#[tokio::test]
async fn test_files_to_answers() {
    let dir = tempfile::tempdir().unwrap();
    let rust = write_file(
        &dir,
        "rust.txt",
        "The borrow checker enforces ownership rules at compile time.",
    );
    let cooking = write_file(
        &dir,
        "cooking.txt",
        "Whisk the eggs with sugar until the mixture turns pale.",
    );

    let store = RagStore::new(&Config::default()).unwrap();
    let docs = load_text_files(&[rust, cooking]).unwrap();
    let chunks = CharacterTextSplitter::default().split_all(&docs);
    assert_eq!(store.build(chunks).await.unwrap(), 2);

    let top = store.search_by_text("ownership and the borrow checker", 1, false).await.unwrap();
    let top = top.as_ranked().unwrap();
    assert_eq!(top.len(), 1);
    assert!(top[0].contains("borrow checker"));

    let scored = store.search_by_text_scored("eggs and sugar", 2).await.unwrap();
    assert!(scored[0].text.contains("eggs"));
    assert!(scored[0].score > scored[1].score);
}

#[tokio::test]
async fn test_long_document_is_chunked() {
    let dir = tempfile::tempdir().unwrap();
    let body = "alpha beta gamma delta ".repeat(20);
    let path = write_file(&dir, "long.txt", &body);

    let store = RagStore::new(&Config::default()).unwrap();
    let splitter = CharacterTextSplitter::new(100, 20).unwrap();
    let chunks = splitter.split_all(&load_text_files(&[path]).unwrap());
    let expected = chunks.len();
    assert!(expected > 1);

    assert_eq!(store.build(chunks).await.unwrap(), expected);
    assert_eq!(store.dimension(), Some(256));
}
