use chrono::{DateTime, Utc};
use log::info;
use sqeel::Model;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Model, Debug, Clone)]
#[allow(non_snake_case, dead_code)]
struct User {
    #[sqeel("type:CHAR(36),primary")]
    ID: Uuid,
    #[sqeel("type:VARCHAR(50),attrs:NOT NULL,unique")]
    Username: String,
    #[sqeel("type:INTEGER,attrs:NOT NULL DEFAULT 0")]
    Age: i32,
    #[sqeel("type:DATETIME,attrs:NOT NULL")]
    CreatedAt: DateTime<Utc>,
}

#[derive(Model, Debug, Clone)]
#[allow(non_snake_case, dead_code)]
struct Post {
    #[sqeel("type:CHAR(36),primary")]
    ID: Uuid,
    #[sqeel("type:CHAR(36),attrs:NOT NULL,name:author_id")]
    UserID: Uuid,
    #[sqeel("type:VARCHAR(200)")]
    Title: String,
    #[sqeel("type:TEXT")]
    Content: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let users = User::describe("users", HashMap::new())?;

    let mut post_fks = HashMap::new();
    post_fks.insert(post_fields::USER_ID.to_string(), format!("users.{}", user_fields::ID));
    let posts = Post::describe("posts", post_fks)?;

    for table in [&users, &posts] {
        info!("table {} columns: {:?}", table.name(), table.sql_names());
        println!("{}", table.exists_statement());
        println!("{}", table.drop_statement());
        println!("{}\n", table.create_statement());
    }

    for key in posts.keys() {
        println!("{} ({}) -> {}", key.source_name(), key.source_type(), key.sql_name());
    }

    Ok(())
}
