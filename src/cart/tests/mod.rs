pub(crate) mod cart_service_tests;
