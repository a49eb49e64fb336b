mod ticket_config;
