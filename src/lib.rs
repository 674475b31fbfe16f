pub mod configuration;

pub mod integration {
    pub mod integrationerror;
    pub mod bounds;
    pub mod quadraturerule;
    pub mod integrationrequest;
    pub mod integrationrequestmanager;
    pub mod diagnosticsink;
    pub mod integrator;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod curve {
        pub mod curve;
    }
    pub mod polynomial {
        pub mod polynomial;
        pub mod coefficientparser;
    }
}
