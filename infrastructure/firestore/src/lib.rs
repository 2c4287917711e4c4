pub mod client;
pub mod value;
pub mod grocery_item {
    pub mod repository;
}
