pub mod application {
    pub mod menu {
        pub mod form;
        pub mod sample;
        pub mod service;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod menu {
        pub mod catalog;
        pub mod errors;
        pub mod id_provider;
        pub mod model;
        pub mod use_cases;
        pub mod value_objects;
    }
}
