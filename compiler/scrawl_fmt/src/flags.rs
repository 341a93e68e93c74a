use bitflags::bitflags;

bitflags! {
    /// Options for [`canonicalise`](crate::canonicalise).
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct BeautifyFlags: u8 {
        /// Keep every token.
        const NORMAL = 1 << 0;
        /// Drop comment tokens. Used for hashing.
        const DISCARD_COMMENTS = 1 << 1;
    }
}
