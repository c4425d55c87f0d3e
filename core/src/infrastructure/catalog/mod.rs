pub mod static_catalog;
pub mod supabase_store;

pub use static_catalog::StaticCatalogRepository;
pub use supabase_store::SupabaseCatalogStore;
