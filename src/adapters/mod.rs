pub mod xhtml;
