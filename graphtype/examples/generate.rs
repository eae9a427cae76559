//! Generates TypeScript declarations for a small blog schema.
//!
//! Run with: `cargo run --example generate`

use graphtype::prelude::*;

fn main() -> Result<(), CodegenError> {
    let sdl = r#"
scalar Date

enum Status {
    DRAFT
    PUBLISHED
}

interface Node {
    id: ID!
}

type Author implements Node {
    id: ID!
    name: String!
    joined: Date
}

type Post implements Node {
    id: ID!
    title: String!
    status: Status!
    tags: [String!]!
    author: Author
}

union Feed = Post | Author

type Query {
    feed: [Feed!]!
}
"#;

    let declarations = generate_from_sdl(sdl)?;
    println!("{declarations}");

    Ok(())
}
