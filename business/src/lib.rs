pub mod application {
    pub mod config {
        pub mod load;
    }
}

pub mod domain {
    pub mod logger;
    pub mod config {
        pub mod defaults;
        pub mod env_source;
        pub mod errors;
        pub mod keys;
        pub mod model;
        pub mod resolve;
        pub mod use_cases {
            pub mod load;
        }
    }
}
