mod derive_verify;
mod memory_ceiling;
