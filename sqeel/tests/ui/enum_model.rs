use sqeel::Model;

#[derive(Model)]
enum Role {
    Admin,
    Guest,
}

fn main() {}
