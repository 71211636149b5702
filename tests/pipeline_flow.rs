//! Full runs of the pipeline against a stubbed API.
//!
//! Each mock declares how often it must be hit, so a passing test shows both
//! the request payloads and the exact call sequence.

mod common;

use common::*;
use mockito::Matcher;
use readme_backdate::services::{run_pipeline, ScriptedChooser};
use serde_json::json;

/// One public repository with one file "hello"; the user owns "repo1" whose
/// README is at "abc123".
#[tokio::test]
async fn test_end_to_end_commit() {
    let mut server = mockito::Server::new_async().await;

    let search = server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::UrlEncoded("q".into(), "README".into()))
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_body(&[("someone", "sample")]).to_string())
        .expect(1)
        .create_async()
        .await;
    let listing = mock_json(
        &mut server,
        "GET",
        "/repos/someone/sample/contents",
        200,
        listing_body(&[("hello.txt", "file")]),
        1,
    )
    .await;
    let file = mock_json(
        &mut server,
        "GET",
        "/repos/someone/sample/contents/hello.txt",
        200,
        file_body("hello.txt", "f1", "aGVsbG8="),
        1,
    )
    .await;
    let user = mock_json(
        &mut server,
        "GET",
        "/user",
        200,
        json!({ "login": "octocat", "email": null }),
        1,
    )
    .await;
    let repos = mock_json(
        &mut server,
        "GET",
        "/user/repos",
        200,
        json!([{ "name": "repo1" }]),
        1,
    )
    .await;
    let readme = mock_json(
        &mut server,
        "GET",
        "/repos/octocat/repo1/contents/README.md",
        200,
        file_body("README.md", "abc123", "b2xk"),
        1,
    )
    .await;

    let blob = server
        .mock("POST", "/repos/octocat/repo1/git/blobs")
        .match_body(Matcher::PartialJson(json!({
            "content": "aGVsbG8=",
            "encoding": "base64"
        })))
        .with_status(201)
        .with_body(json!({ "sha": "blob1" }).to_string())
        .expect(1)
        .create_async()
        .await;
    let get_ref = mock_json(
        &mut server,
        "GET",
        "/repos/octocat/repo1/git/refs/heads/main",
        200,
        ref_body("base1"),
        1,
    )
    .await;
    let get_tree = mock_json(
        &mut server,
        "GET",
        "/repos/octocat/repo1/git/trees/base1",
        200,
        json!({ "sha": "tree0", "tree": [], "truncated": false }),
        1,
    )
    .await;
    let new_tree = server
        .mock("POST", "/repos/octocat/repo1/git/trees")
        .match_body(Matcher::PartialJson(json!({
            "base_tree": "tree0",
            "tree": [{ "path": "README.md", "mode": "100644", "type": "blob", "sha": "blob1" }]
        })))
        .with_status(201)
        .with_body(json!({ "sha": "tree1" }).to_string())
        .expect(1)
        .create_async()
        .await;
    let commit = server
        .mock("POST", "/repos/octocat/repo1/git/commits")
        .match_body(Matcher::PartialJson(json!({
            "message": "Update README.md",
            "author": {
                "name": "octocat",
                "email": "example@example.com",
                "date": "2023-01-01T12:00:00Z"
            },
            "committer": { "date": "2023-01-01T12:00:00Z" },
            "parents": ["base1"],
            "tree": "tree1"
        })))
        .with_status(201)
        .with_body(json!({ "sha": "commit1" }).to_string())
        .expect(1)
        .create_async()
        .await;
    let update_ref = server
        .mock("PATCH", "/repos/octocat/repo1/git/refs/heads/main")
        .match_body(Matcher::PartialJson(json!({ "sha": "commit1", "force": true })))
        .with_status(200)
        .with_body(ref_body("commit1").to_string())
        .expect(1)
        .create_async()
        .await;

    let config = config_for(&server);
    let client = client_for(&config);
    let summary = run_pipeline(&client, &config, &mut ScriptedChooser::first())
        .await
        .unwrap();

    assert_eq!(summary.commit_sha, "commit1");
    assert_eq!(summary.owner, "octocat");
    assert_eq!(summary.repository, "repo1");
    assert_eq!(summary.branch, "main");
    assert_eq!(summary.source.text, "hello");
    assert_eq!(summary.source.path, "hello.txt");
    assert_eq!(summary.source.owner, "someone");

    for mock in [
        &search, &listing, &file, &user, &repos, &readme, &blob, &get_ref, &get_tree, &new_tree,
        &commit, &update_ref,
    ] {
        mock.assert_async().await;
    }
}

/// The random picks select the second search result, second file and second
/// repository; the unpicked candidates are never touched.
#[tokio::test]
async fn test_scripted_choices_drive_every_pick() {
    let mut server = mockito::Server::new_async().await;

    mock_json(
        &mut server,
        "GET",
        "/search/repositories",
        200,
        search_body(&[("first", "one"), ("second", "two")]),
        1,
    )
    .await;
    let skipped_listing = mock_json(
        &mut server,
        "GET",
        "/repos/first/one/contents",
        200,
        listing_body(&[("a.md", "file")]),
        0,
    )
    .await;
    mock_json(
        &mut server,
        "GET",
        "/repos/second/two/contents",
        200,
        listing_body(&[("skip.md", "file"), ("take.md", "file")]),
        1,
    )
    .await;
    let skipped_file = mock_json(
        &mut server,
        "GET",
        "/repos/second/two/contents/skip.md",
        200,
        file_body("skip.md", "s", "bm8="),
        0,
    )
    .await;
    mock_json(
        &mut server,
        "GET",
        "/repos/second/two/contents/take.md",
        200,
        file_body("take.md", "t", "eWVz"),
        1,
    )
    .await;
    mock_json(
        &mut server,
        "GET",
        "/user",
        200,
        json!({ "login": "me", "email": "me@example.org" }),
        1,
    )
    .await;
    mock_json(
        &mut server,
        "GET",
        "/user/repos",
        200,
        json!([{ "name": "alpha" }, { "name": "beta" }]),
        1,
    )
    .await;
    let skipped_repo = mock_json(
        &mut server,
        "GET",
        "/repos/me/alpha/contents/README.md",
        200,
        file_body("README.md", "x", ""),
        0,
    )
    .await;
    mock_json(
        &mut server,
        "GET",
        "/repos/me/beta/contents/README.md",
        200,
        file_body("README.md", "y", ""),
        1,
    )
    .await;
    let blob = server
        .mock("POST", "/repos/me/beta/git/blobs")
        .match_body(Matcher::PartialJson(json!({ "content": "eWVz" })))
        .with_status(201)
        .with_body(json!({ "sha": "b" }).to_string())
        .expect(1)
        .create_async()
        .await;
    mock_json(&mut server, "GET", "/repos/me/beta/git/refs/heads/main", 200, ref_body("p"), 1).await;
    mock_json(&mut server, "GET", "/repos/me/beta/git/trees/p", 200, json!({ "sha": "t0" }), 1).await;
    mock_json(&mut server, "POST", "/repos/me/beta/git/trees", 201, json!({ "sha": "t1" }), 1).await;
    let commit = server
        .mock("POST", "/repos/me/beta/git/commits")
        .match_body(Matcher::PartialJson(json!({
            "author": { "name": "me", "email": "me@example.org" }
        })))
        .with_status(201)
        .with_body(json!({ "sha": "c" }).to_string())
        .expect(1)
        .create_async()
        .await;
    mock_json(
        &mut server,
        "PATCH",
        "/repos/me/beta/git/refs/heads/main",
        200,
        ref_body("c"),
        1,
    )
    .await;

    let config = config_for(&server);
    let client = client_for(&config);
    let summary = run_pipeline(&client, &config, &mut ScriptedChooser::new([1, 1, 1]))
        .await
        .unwrap();

    assert_eq!(summary.repository, "beta");
    assert_eq!(summary.source.text, "yes");
    assert_eq!(summary.source.repository, "two");
    skipped_listing.assert_async().await;
    skipped_file.assert_async().await;
    skipped_repo.assert_async().await;
    blob.assert_async().await;
    commit.assert_async().await;
}
