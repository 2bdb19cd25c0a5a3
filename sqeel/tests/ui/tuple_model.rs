use sqeel::Model;

#[derive(Model)]
struct Pair(i32, i32);

fn main() {}
