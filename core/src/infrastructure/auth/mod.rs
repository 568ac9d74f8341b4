pub mod jwt_verifier;
