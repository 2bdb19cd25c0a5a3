use sqeel::Model;

#[derive(Model)]
struct User {
    #[sqeel("type:INTEGER,primary")]
    #[sqeel("type:BIGINT")]
    id: i64,
}

fn main() {}
