pub mod mockito;
