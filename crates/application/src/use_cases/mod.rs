pub mod resolve_addrs;

pub use resolve_addrs::ResolveAddrsUseCase;
