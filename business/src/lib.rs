pub mod application {
    pub mod catalog {
        pub mod add_item;
        pub mod get;
        pub mod remove_item;
        pub mod replace;
    }
    pub mod meal_plan {
        pub mod generate;
        pub mod get_latest;
        pub mod refresh_meal;
        pub mod replacer;
        pub mod set_meal;
        pub mod synthesizer;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod random;
        pub mod value_objects;
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod get;
            pub mod remove_item;
            pub mod replace;
        }
    }
    pub mod meal_plan {
        pub mod errors;
        pub mod model;
        pub mod prompt;
        pub mod repository;
        pub mod schema;
        pub mod services;
        pub mod use_cases {
            pub mod generate;
            pub mod get_latest;
            pub mod refresh_meal;
            pub mod replace_meal;
            pub mod set_meal;
            pub mod synthesize;
        }
    }
}
