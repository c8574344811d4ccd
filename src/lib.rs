pub mod configuration;

pub mod time {
    pub mod utility;
    pub mod datekey;
    pub mod rangeofdates;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod federalholiday;
    }

    pub mod calendar {
        pub mod businessdayclassification;
        pub mod holidaycalendar;
        pub mod holidayindex;
    }

    pub mod traversal {
        pub mod traversalerror;
        pub mod traversaldirection;
        pub mod startinclusionpolicy;
        pub mod businessdaystepper;
        pub mod businessdaycounter;
    }
}
