mod value_tests;
mod value_decoder_tests;
mod catalog_tests;
mod gps_tests;
