// # Caches
//
// Memoization of directory data (organizations and per-organization
// networks). Local DNS entities are never cached.

pub mod directory;

pub use directory::DirectoryCache;
