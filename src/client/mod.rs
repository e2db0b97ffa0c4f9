mod device_client;

pub use device_client::DeviceClient;
