pub mod application {
    pub mod grocery_item {
        pub mod save;
    }
    pub mod receipt {
        pub mod parse;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod grocery_item {
        pub mod errors;
        pub mod repository;
        pub mod use_cases {
            pub mod save;
        }
    }
    pub mod receipt {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod parse;
        }
    }
}
