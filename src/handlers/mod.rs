// Two security tiers, mirrored in the route table:
// Public (no auth) → Protected (JWT auth, plus the ownership gate on
// single-note routes)
pub mod protected;
pub mod public;
