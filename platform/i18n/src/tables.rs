pub(crate) static EN: &[(&str, &str)] = &[
    ("app_title", "Employee Management"),
    ("nav_employee_list", "Employee List"),
    ("nav_add_employee", "Add New Employee"),
    ("page_title_employee_list", "Employee List"),
    ("page_title_add_employee", "Add New Employee"),
    ("page_title_edit_employee", "Edit Employee"),
    ("employee_id", "ID"),
    ("employee_firstName", "First Name"),
    ("employee_lastName", "Last Name"),
    ("employee_email", "Email"),
    ("employee_department", "Department"),
    ("employee_position", "Position"),
    ("employee_phoneNumber", "Phone"),
    ("employee_dateOfEmployment", "Employed"),
    ("employee_dateOfBirth", "Born"),
    ("actions", "Actions"),
    ("button_edit", "Edit"),
    ("button_delete", "Delete"),
    ("button_add_employee", "Add Employee"),
    ("button_save_changes", "Save Changes"),
    ("button_cancel", "Cancel"),
    ("button_view_table", "Table View"),
    ("button_view_list", "List View"),
    ("department_analytics", "Analytics"),
    ("department_tech", "Tech"),
    ("position_junior", "Junior"),
    ("position_medior", "Medior"),
    ("position_senior", "Senior"),
    ("form_label_firstName", "First Name"),
    ("form_label_lastName", "Last Name"),
    ("form_label_dateOfEmployment", "Date of Employment"),
    ("form_label_dateOfBirth", "Date of Birth"),
    ("form_label_phoneNumber", "Phone Number"),
    ("form_label_emailAddress", "Email Address"),
    ("form_label_department", "Department"),
    ("form_label_position", "Position"),
    ("validation_required_firstName", "First Name is required."),
    ("validation_required_lastName", "Last Name is required."),
    ("validation_required_dateOfEmployment", "Date of Employment is required."),
    ("validation_required_dateOfBirth", "Date of Birth is required."),
    ("validation_required_phoneNumber", "Phone Number is required."),
    ("validation_required_emailAddress", "Email Address is required."),
    ("validation_invalid_emailAddress", "Please enter a valid email address."),
    ("confirm_update_employee", "Are you sure you want to update this employee record?"),
    ("confirm_delete_employee", "Are you sure you want to delete {{name}}?"),
    (
        "error_delete_employee",
        "Could not delete employee {{name}}. The record might have already been removed or an error occurred.",
    ),
    ("error_employee_not_found", "No employee with ID {{id}}."),
    ("employee_added", "Added {{name}} with ID {{id}}."),
    ("employee_updated", "Updated {{name}}."),
    ("employee_deleted", "Deleted {{name}}."),
    ("no_employees_found", "No employees found."),
    ("search_placeholder", "Search employees"),
    ("search_aria_label", "Search Employees"),
    ("no_employees_found_search", "No employees found matching \"{{term}}\"."),
    ("pagination_page_of", "Page {{page}} of {{total}}"),
    ("pagination_previous", "Previous"),
    ("pagination_next", "Next"),
    ("confirm_reset_store", "Replace all employee records with the seed data?"),
    ("store_reset", "Store reset to {{count}} seed records."),
];

pub(crate) static TR: &[(&str, &str)] = &[
    ("app_title", "Çalışan Yönetimi"),
    ("nav_employee_list", "Çalışan Listesi"),
    ("nav_add_employee", "Yeni Çalışan Ekle"),
    ("page_title_employee_list", "Çalışan Listesi"),
    ("page_title_add_employee", "Yeni Çalışan Ekle"),
    ("page_title_edit_employee", "Çalışanı Düzenle"),
    ("employee_id", "Kimlik"),
    ("employee_firstName", "Adı"),
    ("employee_lastName", "Soyadı"),
    ("employee_email", "E-posta"),
    ("employee_department", "Departman"),
    ("employee_position", "Pozisyon"),
    ("employee_phoneNumber", "Telefon"),
    ("employee_dateOfEmployment", "İşe Giriş Tarihi"),
    ("employee_dateOfBirth", "Doğum Tarihi"),
    ("actions", "İşlemler"),
    ("button_edit", "Düzenle"),
    ("button_delete", "Sil"),
    ("button_add_employee", "Çalışan Ekle"),
    ("button_save_changes", "Değişiklikleri Kaydet"),
    ("button_cancel", "İptal"),
    ("button_view_table", "Tablo Görünümü"),
    ("button_view_list", "Liste Görünümü"),
    ("department_analytics", "Analitik"),
    ("department_tech", "Teknoloji"),
    ("position_junior", "Junior"),
    ("position_medior", "Medior"),
    ("position_senior", "Kıdemli (Senior)"),
    ("form_label_firstName", "Adı"),
    ("form_label_lastName", "Soyadı"),
    ("form_label_dateOfEmployment", "İşe Giriş Tarihi"),
    ("form_label_dateOfBirth", "Doğum Tarihi"),
    ("form_label_phoneNumber", "Telefon Numarası"),
    ("form_label_emailAddress", "E-posta Adresi"),
    ("form_label_department", "Departman"),
    ("form_label_position", "Pozisyon"),
    ("validation_required_firstName", "Ad alanı zorunludur."),
    ("validation_required_lastName", "Soyad alanı zorunludur."),
    ("validation_required_dateOfEmployment", "İşe Giriş Tarihi zorunludur."),
    ("validation_required_dateOfBirth", "Doğum Tarihi zorunludur."),
    ("validation_required_phoneNumber", "Telefon Numarası zorunludur."),
    ("validation_required_emailAddress", "E-posta Adresi zorunludur."),
    ("validation_invalid_emailAddress", "Lütfen geçerli bir e-posta adresi giriniz."),
    (
        "confirm_update_employee",
        "Bu çalışan kaydını güncellemek istediğinizden emin misiniz?",
    ),
    ("confirm_delete_employee", "{{name}} adlı çalışanı silmek istediğinizden emin misiniz?"),
    (
        "error_delete_employee",
        "{{name}} adlı çalışan silinemedi. Kayıt zaten silinmiş olabilir veya bir hata oluştu.",
    ),
    ("error_employee_not_found", "{{id}} kimlikli çalışan bulunamadı."),
    ("employee_added", "{{name}} eklendi, kimlik: {{id}}."),
    ("employee_updated", "{{name}} güncellendi."),
    ("employee_deleted", "{{name}} silindi."),
    ("no_employees_found", "Çalışan bulunamadı."),
    ("search_placeholder", "Çalışanları ara"),
    ("search_aria_label", "Çalışanları Ara"),
    ("no_employees_found_search", "\"{{term}}\" ile eşleşen çalışan bulunamadı."),
    ("pagination_page_of", "Sayfa {{page}} / {{total}}"),
    ("pagination_previous", "Önceki"),
    ("pagination_next", "Sonraki"),
    ("confirm_reset_store", "Tüm çalışan kayıtları örnek verilerle değiştirilsin mi?"),
    ("store_reset", "Kayıtlar {{count}} örnek çalışana sıfırlandı."),
];
