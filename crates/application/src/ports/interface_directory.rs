/// Network interface name/index lookup used for IPv6 zones.
pub trait InterfaceDirectory: Send + Sync {
    fn index_by_name(&self, name: &str) -> Option<u32>;

    fn name_by_index(&self, index: u32) -> Option<String>;
}
