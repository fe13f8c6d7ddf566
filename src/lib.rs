pub mod benchmark {
    pub mod timing;
    pub mod logtimer;
    pub mod benchmark;
}

pub mod configuration;

pub mod manager {
    pub mod configerror;
    pub mod manager;
}

pub mod math {
    pub mod curve {
        pub mod curve;
    }
    pub mod interpolation {
        pub mod sampleindexerror;
        pub mod sampletable;
    }
    pub mod quadrature {
        pub mod quadraturerule;
    }
}

pub mod simulation {
    pub mod simulationerror;
    pub mod pipeline;
    pub mod sequentialpipeline;
    pub mod parallelpipeline;
    pub mod simulator;
}

pub mod source {
    pub mod sourceerror;
    pub mod accelerationsource;
    pub mod csvsource;
}
