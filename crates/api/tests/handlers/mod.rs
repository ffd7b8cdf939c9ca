mod appointment_test;
