pub mod configuration;

pub mod codec {
    pub mod codecerror;
    pub mod binarycodec;
    pub mod textcodec;
    pub mod recordcodec;
    pub mod jsoncodec;
}

pub mod function {
    pub mod function;
    pub mod functionmanager;

    pub mod basic {
        pub mod trigonometric;
        pub mod exp;
        pub mod log;
    }

    pub mod meta {
        pub mod sum;
        pub mod mult;
        pub mod power;
        pub mod composition;
        pub mod scale;
        pub mod shift;
        pub mod functions;
    }
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod tabulated {
    pub mod point2d;
    pub mod tabulatederror;
    pub mod tabulatedfunction;
    pub mod arraytabulatedfunction;
    pub mod tabulator;
    pub mod tabulationmanager;
}
