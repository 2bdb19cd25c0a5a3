use sqeel::Model;

#[derive(Model)]
struct User {
    #[sqeel = 5]
    id: i64,
}

fn main() {}
