mod load_config;
mod logger;
