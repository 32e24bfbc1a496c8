pub mod neos;
