mod pbkdf2;
mod romix;
mod salsa20;
