pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod session_store;
    }
}

pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod record;
            pub mod view;
        }
        pub mod use_cases {
            pub mod session_lifecycle {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod submit_attendance {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_attendance {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod export_attendance {
                pub mod exporter_port;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod xlsx_exporter;
            }
        }
    }
    pub mod product_showcase {
        pub mod core {
            pub mod dataset;
            pub mod format_spec;
            pub mod gradient;
            pub mod product;
            pub mod table;
        }
        pub mod use_cases {
            pub mod plain_table {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod formatted_columns {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod key_metrics {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod edit_grid {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod styled_view {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod column_selection {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod category_pivot {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
