//! Property-based tests for enrichment and scope expansion.
