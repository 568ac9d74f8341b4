pub mod comment_repository;
