//! Firebird protocol constants

/// Authentication plugins offered when `auth_plugin_name` is not configured
pub const DEFAULT_AUTH_PLUGINS: &[&str] = &["Srp256", "Srp"];

/// Transaction parameter buffer items (`isc_tpb_*`)
pub mod tpb {
    /// TPB format version
    pub const VERSION3: u8 = 3;

    /// Serializable (table stability)
    pub const CONSISTENCY: u8 = 1;

    /// Snapshot (repeatable read)
    pub const CONCURRENCY: u8 = 2;

    /// Wait on lock conflicts
    pub const WAIT: u8 = 6;

    /// Fail immediately on lock conflicts
    pub const NOWAIT: u8 = 7;

    /// Read-only access
    pub const READ: u8 = 8;

    /// Read-write access
    pub const WRITE: u8 = 9;

    /// Read committed isolation
    pub const READ_COMMITTED: u8 = 15;

    /// Server commits after each statement
    pub const AUTOCOMMIT: u8 = 16;

    /// Read the latest committed record version
    pub const REC_VERSION: u8 = 17;

    /// Wait for uncommitted record versions to resolve
    pub const NO_REC_VERSION: u8 = 18;
}

/// SRP group parameters shared with the server
pub mod srp {
    /// 1024-bit safe prime `N`, hex encoded
    pub const PRIME_HEX: &str = concat!(
        "E67D2E994B2F900C3F41F08F5BB2627ED0D49EE1FE767A52EFCD565CD6E76881",
        "2C3E1E9CE8F0A8BEA6CB13CD29DDEBF7A96D4A93B55D488DF099A15C89DCB064",
        "0738EB2CBDD9A8F7BAB561AB1B0DC1C6CDABF303264A08D1BCA932D1F1EE428B",
        "619D970F342ABA9A65793B8B2F041AE5364350C16F735F56ECBCA87BD57B29E7",
    );

    /// Generator `g`
    pub const GENERATOR: u32 = 2;

    /// Size of the ephemeral client secret in bytes
    pub const SECRET_BYTES: usize = 16;
}

/// Catalog query for the server's time-zone table (Firebird 4+)
pub const TIME_ZONE_QUERY: &str =
    "select rdb$time_zone_id, rdb$time_zone_name from rdb$time_zones";
