// Author: Eshan Roy
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use assert_cmd::Command;
use git2::{Repository, Signature};
use std::path::Path;
use tempfile::TempDir;

/// A throwaway repository whose `main` branch holds the given commits.
pub struct TestRepo {
    pub dir: TempDir,
    /// Commit ids, oldest first.
    pub commits: Vec<String>,
}

impl TestRepo {
    /// Create `main` with one commit per message, oldest first.
    pub fn with_messages(messages: &[&str]) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let repo = Repository::init(dir.path()).expect("init repository");
        let sig = Signature::now("Test User", "test@example.com").expect("signature");

        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let mut commits: Vec<String> = Vec::new();
        for message in messages {
            let parent = commits
                .last()
                .map(|id| repo.find_commit(git2::Oid::from_str(id).unwrap()).unwrap());
            let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
            let oid = repo
                .commit(Some("refs/heads/main"), &sig, &sig, message, &tree, &parents)
                .expect("create commit");
            commits.push(oid.to_string());
        }
        repo.set_head("refs/heads/main").expect("point HEAD at main");

        Self { dir, commits }
    }

    /// Append a commit to `main` whose message is given as raw bytes.
    pub fn push_raw_message(&mut self, encoding: &str, message: &[u8]) {
        let repo = Repository::open(self.dir.path()).expect("open repository");
        let tree_id = repo.index().unwrap().write_tree().unwrap();

        let mut object = format!("tree {}\n", tree_id);
        if let Some(parent) = self.commits.last() {
            object.push_str(&format!("parent {}\n", parent));
        }
        object.push_str("author Test User <test@example.com> 0 +0000\n");
        object.push_str("committer Test User <test@example.com> 0 +0000\n");
        object.push_str(&format!("encoding {}\n\n", encoding));
        let mut object = object.into_bytes();
        object.extend_from_slice(message);

        let oid = repo
            .odb()
            .unwrap()
            .write(git2::ObjectType::Commit, &object)
            .expect("write commit object");
        repo.reference("refs/heads/main", oid, true, "raw commit")
            .expect("advance main");
        self.commits.push(oid.to_string());
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Id of the n-th commit, oldest first.
    pub fn id(&self, index: usize) -> &str {
        &self.commits[index]
    }

    /// commit-linter running inside this repository with an isolated home.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("commit-linter").expect("binary built");
        isolate(&mut cmd, self.path());
        cmd
    }
}

/// Run a binary from `dir` without picking up the developer's environment.
pub fn isolate(cmd: &mut Command, dir: &Path) {
    isolate_with_home(cmd, dir, dir);
}

/// Run a binary from `dir` with `home` as both the home and XDG base.
pub fn isolate_with_home(cmd: &mut Command, dir: &Path, home: &Path) {
    cmd.current_dir(dir)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("COMMIT_LINTER_BRANCH")
        .env_remove("RUST_LOG");
}

pub const GOOD: &str = "feat: add x\n\nbody\n\nAPM-42\n";
pub const NO_BLANK_AFTER_TITLE: &str = "fix: y\nbody\nAPM-9\n";
pub const BAD_PREFIX: &str = "style: reformat\n\nbody\n\nAPM-7\n";
