pub mod corpus;
pub mod record;
