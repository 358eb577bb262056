pub mod p900_commits;
