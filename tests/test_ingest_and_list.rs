mod common;

use common::setup;
use docrag::domain::error::DomainError;

#[tokio::test]
async fn test_ingest_then_list_contains_content() {
    let (rag, _) = setup();
    rag.ingest("The sky is blue.").await.unwrap();

    let documents = rag.list_documents().unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].content, "The sky is blue.");
}

#[tokio::test]
async fn test_ingest_empty_fails_and_store_unchanged() {
    let (rag, _) = setup();
    let err = rag.ingest("").await.unwrap_err();
    assert!(matches!(err, DomainError::EmptyInput(_)));

    assert!(rag.list_documents().unwrap().is_empty());
    assert_eq!(rag.stats().unwrap().total_documents, 0);
}

#[tokio::test]
async fn test_ingest_whitespace_only_fails() {
    let (rag, _) = setup();
    rag.ingest("real content").await.unwrap();

    let err = rag.ingest("   \n\t  ").await.unwrap_err();
    assert!(matches!(err, DomainError::EmptyInput(_)));
    assert_eq!(rag.stats().unwrap().total_documents, 1);
}

#[tokio::test]
async fn test_sequential_ingestions_get_count_based_ids() {
    let (rag, _) = setup();
    let first = rag.ingest("First document").await.unwrap();
    let second = rag.ingest("Second document").await.unwrap();

    assert_eq!(first.id, "doc_0");
    assert_eq!(second.id, "doc_1");

    let documents = rag.list_documents().unwrap();
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].id, "doc_0");
    assert_eq!(documents[1].id, "doc_1");
}

#[tokio::test]
async fn test_content_stored_untrimmed() {
    let (rag, _) = setup();
    let doc = rag.ingest("  padded text  ").await.unwrap();
    assert_eq!(doc.content, "  padded text  ");

    let documents = rag.list_documents().unwrap();
    assert_eq!(documents[0].content, "  padded text  ");
}

#[tokio::test]
async fn test_list_empty_store_returns_empty_vec() {
    let (rag, _) = setup();
    assert!(rag.list_documents().unwrap().is_empty());
}

#[tokio::test]
async fn test_stats_counts_documents() {
    let (rag, _) = setup();
    for i in 0..3 {
        rag.ingest(&format!("Document number {i}")).await.unwrap();
    }
    assert_eq!(rag.stats().unwrap().total_documents, 3);
}
