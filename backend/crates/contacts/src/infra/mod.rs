pub mod postgres;

pub use postgres::PgContactRepository;
