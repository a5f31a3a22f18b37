pub mod shared {
    pub mod auth {
        pub mod identity;
        pub mod pin;
        pub mod token;
    }
    pub mod core {
        pub mod clock;
        pub mod dates;
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod in_memory;
        pub mod sqlite;
    }
}

pub mod modules {
    pub mod time_tracking {
        pub mod core {
            pub mod aggregation;
            pub mod ports;
            pub mod time_entry;
        }
        pub mod use_cases {
            pub mod start_shift {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod stop_shift {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod time_summary {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod in_memory;
                pub mod sqlite;
            }
        }
    }

    pub mod timesheets {
        pub mod core {
            pub mod csv_export;
            pub mod decide;
            pub mod ports;
            pub mod timesheet;
            pub mod week_view;
        }
        pub mod use_cases {
            pub mod week_view {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod set_note {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod submit_timesheet {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_timesheets {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod decide_timesheet {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod export_timesheets {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod in_memory;
                pub mod sqlite;
            }
        }
    }

    pub mod employees {
        pub mod core {
            pub mod access;
            pub mod employee;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod login {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_employees {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod in_memory;
                pub mod sqlite;
            }
        }
    }

    pub mod audit {
        pub mod core {
            pub mod audit_record;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod list_audit_records {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod in_memory;
                pub mod sqlite;
            }
        }
    }
}

pub mod shell;
